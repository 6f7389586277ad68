mod native;

pub use native::timer::Timer;
