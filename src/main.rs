// src/main.rs

use log::{error, info, warn};
use env_logger::Env;
use num::BigInt;
use std::str::FromStr;
use qsieve::config::QsConfig;
use qsieve::core::events::FactorEvent;
use qsieve::core::worker;

fn main() {
    // Initialize the logger
    let env = Env::default()
        .filter_or("QSIEVE_LOG_LEVEL", "info")
        .write_style_or("QSIEVE_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    let argument = match std::env::args().nth(1) {
        Some(argument) => argument,
        None => {
            error!("usage: qsieve <integer>");
            std::process::exit(2);
        }
    };
    let n = match BigInt::from_str(argument.trim()) {
        Ok(n) => n,
        Err(parse_error) => {
            error!("not an integer: {}", parse_error);
            std::process::exit(2);
        }
    };

    let config = QsConfig::load().unwrap_or_else(|config_error| {
        warn!("falling back to default configuration: {}", config_error);
        QsConfig::default()
    });

    for event in worker::spawn(n, config) {
        match event {
            FactorEvent::Started => info!("worker started"),
            FactorEvent::Progress(ratio) => info!("sieving {:.1}%", ratio * 100.0),
            FactorEvent::Done(factors) => {
                let rendered: Vec<String> = factors.iter().map(|f| f.to_string()).collect();
                println!("{}", rendered.join(" "));
            }
        }
    }
}
