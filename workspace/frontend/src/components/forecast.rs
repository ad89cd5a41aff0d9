mod result_card;
mod view;

pub use view::ForecastPage;
