#[path = "sys/cores.rs"]
mod cores;
#[path = "sys/exit_code.rs"]
mod exit_code;
#[path = "sys/runtime.rs"]
mod runtime;
