mod statistics_bucketer;

pub use statistics_bucketer::StatisticsBucketer;
