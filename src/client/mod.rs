mod config;
mod raw;
mod request;
mod stream;
mod webhdfs;


pub use config::ClientConfig;
pub use raw::RawClient;
pub use request::OpRequest;
pub use stream::FileStream;
pub use webhdfs::WebHdfsClient;
