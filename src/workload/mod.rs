pub mod request_generator;
