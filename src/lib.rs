#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use etl_os as os;
pub use etl_ptr as ptr;
pub use etl_utils as utils;
