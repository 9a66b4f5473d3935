pub mod engine_handler;

pub use engine_handler::EngineHandler;
