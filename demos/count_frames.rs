//! Read a logplex stream from a file (or stdin) and count how many frames decode

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, level_filters::LevelFilter, warn};

use logplex_syslog::{DecodeErr, Decoder, DecoderConfig};

#[derive(Parser, Debug)]
#[command(name = "count_frames", version, about)]
struct Args {
    /// Path to input file (if '-', reads stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Reject frames whose declared length exceeds this many bytes
    #[arg(long)]
    max_frame_len: Option<usize>,

    /// Also check that every timestamp parses as RFC 3339
    #[arg(long)]
    check_time: bool,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let input: Box<dyn BufRead> = if args.input.as_os_str() == "-" {
        Box::new(stdin.lock())
    } else {
        Box::new(BufReader::new(File::open(&args.input)?))
    };

    let config = DecoderConfig {
        max_frame_len: args.max_frame_len,
    };
    let mut decoder = Decoder::with_config(input, config);
    let (mut ok, mut bad) = (0u64, 0u64);
    loop {
        match decoder.decode() {
            Ok(msg) => {
                if args.check_time {
                    if let Err(e) = msg.time() {
                        warn!(frame = ok + bad, error = %e, "bad timestamp");
                        bad += 1;
                        continue;
                    }
                }
                ok += 1;
            }
            Err(DecodeErr::EndOfStream) => break,
            Err(e) if e.is_recoverable() => {
                warn!(frame = ok + bad, error = %e, "skipping frame");
                bad += 1;
            }
            Err(e) => {
                error!(frame = ok + bad, error = %e, "stream unreadable");
                break;
            }
        }
    }

    info!(ok, bad, "done");
    println!("count ok: {:?}", ok);
    Ok(())
}
