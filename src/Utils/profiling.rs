use log::info;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tabled::{builder::Builder, settings::Style};

pub fn elapsed_time(elapsed: Duration) -> (String, f64) {
    let time = elapsed.as_millis();
    if time < 1000 {
        info!("Elapsed {} ms", time);
        (" ms ".to_string(), time as f64)
    } else if time >= 1000 && time < 60_000 {
        info!("Elapsed {} s", elapsed.as_secs());
        (" s".to_string(), elapsed.as_secs() as f64)
    } else if time >= 60_000 && time < 3600_000 {
        info!("Elapsed {} min", elapsed.as_secs() / 60);
        (" min".to_string(), elapsed.as_secs() as f64 / 60.0)
    } else {
        info!("Elapsed {} h", elapsed.as_secs() / 3600);
        (" h".to_string(), elapsed.as_secs() as f64 / 3600.0)
    }
}

/// stage timer of the BCH pipeline: matrix i/o, pair generation,
/// commutator evaluation and final summation
#[derive(Debug, Clone)]
pub struct CustomTimer {
    pub start: Instant,
    pub io_time: Instant,
    pub io: Duration,
    pub pairs_time: Instant,
    pub pairs: Duration,
    pub commutators_time: Instant,
    pub commutators: Duration,
    pub summation_time: Instant,
    pub summation: Duration,
}

impl CustomTimer {
    pub fn new() -> CustomTimer {
        CustomTimer {
            start: Instant::now(),
            io_time: Instant::now(),
            io: Duration::from_secs(0),
            pairs_time: Instant::now(),
            pairs: Duration::from_secs(0),
            commutators_time: Instant::now(),
            commutators: Duration::from_secs(0),
            summation_time: Instant::now(),
            summation: Duration::from_secs(0),
        }
    }
    pub fn io_tic(&mut self) {
        self.io_time = Instant::now();
    }
    pub fn io_tac(&mut self) {
        let io = self.io_time.elapsed();
        self.io += io;
    }
    pub fn pairs_tic(&mut self) {
        self.pairs_time = Instant::now();
    }
    pub fn pairs_tac(&mut self) {
        let pairs = self.pairs_time.elapsed();
        self.pairs += pairs;
    }
    pub fn commutators_tic(&mut self) {
        self.commutators_time = Instant::now();
    }
    pub fn commutators_tac(&mut self) {
        let commutators = self.commutators_time.elapsed();
        self.commutators += commutators;
    }
    pub fn summation_tic(&mut self) {
        self.summation_time = Instant::now();
    }
    pub fn summation_tac(&mut self) {
        let summation = self.summation_time.elapsed();
        self.summation += summation;
    }

    pub fn get_all(&self) -> HashMap<String, String> {
        let mut timer_data: HashMap<String, String> = HashMap::new();

        let total_time = self.start.elapsed().as_nanos() as f64;
        let total_time_string = elapsed_time(self.start.elapsed());

        let io_total = self.io.as_nanos() as f64;
        let io_time_percent = 100.0 * io_total / total_time;
        let io_total_string = elapsed_time(self.io);

        let pairs_total = self.pairs.as_nanos() as f64;
        let pairs_time_percent = 100.0 * pairs_total / total_time;
        let pairs_total_string = elapsed_time(self.pairs);

        let commutators_total = self.commutators.as_nanos() as f64;
        let commutators_time_percent = 100.0 * commutators_total / total_time;
        let commutators_total_string = elapsed_time(self.commutators);

        let summation_total = self.summation.as_nanos() as f64;
        let summation_time_percent = 100.0 * summation_total / total_time;
        let summation_total_string = elapsed_time(self.summation);

        let other = total_time - io_total - pairs_total - commutators_total - summation_total;
        let other_percent = 100.0 * other / total_time;

        if other_percent > 0.5 {
            timer_data.insert(
                "other %".to_string(),
                format!("{} ", (other_percent * 1000.0).round() / 1000.0),
            );
        }
        timer_data.insert(
            "time elapsed, ".to_string() + total_time_string.0.as_str(),
            format!("{}", total_time_string.1),
        );
        if io_time_percent > 0.5 {
            timer_data.insert(
                "Matrix I/O (%, ".to_string() + io_total_string.0.as_str() + ")",
                format!(
                    "{}, {}",
                    (io_time_percent * 1000.0).round() / 1000.0,
                    io_total_string.1
                ),
            );
        }
        if pairs_time_percent > 0.5 {
            timer_data.insert(
                "Pair Generation (%, ".to_string() + pairs_total_string.0.as_str() + ")",
                format!(
                    "{}, {}",
                    (pairs_time_percent * 1000.0).round() / 1000.0,
                    pairs_total_string.1
                ),
            );
        }
        if commutators_time_percent > 0.5 {
            timer_data.insert(
                "Commutators (%, ".to_string() + commutators_total_string.0.as_str() + ")",
                format!(
                    "{}, {}",
                    (commutators_time_percent * 1000.0).round() / 1000.0,
                    commutators_total_string.1
                ),
            );
        }
        if summation_time_percent > 0.5 {
            timer_data.insert(
                "Summation (%, ".to_string() + summation_total_string.0.as_str() + ")",
                format!(
                    "{}, {}",
                    (summation_time_percent * 1000.0).round() / 1000.0,
                    summation_total_string.1
                ),
            );
        }
        let mut table = Builder::from(timer_data.clone()).build();
        table.with(Style::modern_rounded());
        info!("\n \n TIMER DATA \n \n {}", table.to_string());
        timer_data
    }
}
