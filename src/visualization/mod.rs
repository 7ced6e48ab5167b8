pub mod vis2d;
