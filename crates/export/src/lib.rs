//! Export helpers for CSV and JSON artifacts.

pub mod sweep {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "rank,features,total_noise_db,broadband_db,tonal_db,vortex_db,thrust_n,power_w,ntr_db_per_n,reduction_percent,penalty_percent,complexity_score,target_met";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub rank: usize,
        /// `+`-joined feature identifiers, or `baseline`.
        pub features: &'a str,
        pub total_noise_db: f64,
        pub broadband_db: f64,
        pub tonal_db: f64,
        pub vortex_db: f64,
        pub thrust_n: f64,
        pub power_w: f64,
        pub ntr_db_per_n: f64,
        pub reduction_percent: f64,
        pub penalty_percent: f64,
        pub complexity_score: u8,
        pub target_met: bool,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{:.4},{:.4},{:.4},{:.4},{:.6},{:.4},{:.6},{:.4},{:.4},{},{}",
                self.rank,
                self.features,
                self.total_noise_db,
                self.broadband_db,
                self.tonal_db,
                self.vortex_db,
                self.thrust_n,
                self.power_w,
                self.ntr_db_per_n,
                self.reduction_percent,
                self.penalty_percent,
                self.complexity_score,
                self.target_met,
            )
        }
    }
}

pub mod report {
    use std::io::{self, Write};

    use serde::Serialize;

    /// Write any serializable report as pretty-printed JSON.
    pub fn write_json<T: Serialize>(writer: &mut dyn Write, report: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}
