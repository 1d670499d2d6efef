pub mod producer;
pub mod serializer;


pub use producer::NameProducer;
pub use serializer::JsonSerializer;
