//! Integration tests across the parser, patch engine and HTTP layer.

mod helpers;
mod modify;
mod proxy;
