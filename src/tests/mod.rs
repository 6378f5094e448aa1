mod avalanche;
mod probe;
