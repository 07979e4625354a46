// third-party imports
use criterion::criterion_main;

const GROUP: &str = "pagesift";
const ND: &str = ":"; // name delimiter

mod filter;
mod pattern;
mod samples;

criterion_main!(pattern::benches, filter::benches);
