// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use std::process;

use legionmon::{Config, Monitor, Result, Terminal};

fn main() {
    env_logger::init();

    let result = run(Config::default());

    let (code, lines) = legionmon::report(&result);
    for line in lines {
        eprintln!("{}", line);
    }
    process::exit(code);
}

fn run(config: Config) -> Result<()> {
    let root = legionmon::locate(&config)?;
    log::info!("Using sensors under {}", root);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut monitor = Monitor::new(root, config, Terminal::stdout());
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Can't listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    runtime.block_on(monitor.run(shutdown))
}
