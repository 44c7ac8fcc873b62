mod styles;

pub use styles::APP_STYLES;
