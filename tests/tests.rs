mod controller;
mod seed;
mod util;
