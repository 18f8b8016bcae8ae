pub mod stub_command;
