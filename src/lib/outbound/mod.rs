pub mod dotenv;
pub mod environment;
