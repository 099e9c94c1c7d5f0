use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufWriter, Write};

use ledger_basics::{config, init_logging, Employee};

fn main() -> Result<()> {
    // Initialize logging.
    init_logging();

    let mut employee = Employee::new(
        config::EMPLOYEE_NAME,
        config::EMPLOYEE_AGE,
        config::INITIAL_BALANCE,
    );
    debug!("Before deposit: {}", employee.to_json()?);

    employee.deposit(config::DEPOSIT_AMOUNT);
    info!("Balance for {} is now {}", employee.name(), employee.balance());

    let mut writer = BufWriter::new(std::io::stdout().lock());
    writeln!(writer, "{}", employee.balance()).context("Failed to write balance")?;
    writer.flush().context("Failed to flush stdout")?;

    Ok(())
}
