pub mod alu;
pub mod cpu;
pub mod isa;
pub mod loader;
pub mod machine;
