pub mod cmd;
pub mod fsutil;
pub mod util;
