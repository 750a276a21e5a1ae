mod common;
mod criteria;
