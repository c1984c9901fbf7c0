mod controller;
mod sequencing;
mod utils;
