mod normalize;
mod tables;
