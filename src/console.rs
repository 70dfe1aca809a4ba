use std::io;
use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::error::TellerError;
use crate::teller::Teller;

const INQUIRE: u32 = 1;
const DEPOSIT: u32 = 2;
const WITHDRAW: u32 = 3;
const TRANSFER: u32 = 4;
const EXIT: u32 = 5;

enum Flow {
    Continue,
    Exit,
}

/// Drives the operator conversation until the exit choice or end of input.
/// Every teller error is reported and the menu resumes; only real I/O
/// failures on `output` abort the loop.
pub fn run_menu_loop(
    teller: &mut Teller,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    loop {
        write_menu(&mut output)?;

        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match serve(teller, &choice, &mut input, &mut output) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(TellerError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(TellerError::Io(e)) => return Err(e),
            Err(e @ TellerError::InvalidInput(_)) => writeln!(output, "\n[input error] {}", e)?,
            Err(e) => writeln!(output, "\n[error] {}", e)?,
        }
    }
    Ok(())
}

fn serve(
    teller: &mut Teller,
    choice: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Flow, TellerError> {
    let choice: u32 = choice.trim().parse().map_err(|_| {
        TellerError::InvalidInput(format!("`{}` is not a menu option", choice.trim()))
    })?;

    if choice == EXIT {
        writeln!(output, "Leaving the teller. Goodbye.")?;
        return Ok(Flow::Exit);
    }

    let id = prompt_account_id(input, output, "\nAccount id to operate on: ")?;
    let current = teller.inquire(id)?;

    match choice {
        INQUIRE => {
            writeln!(output, "\n--- Balance inquiry ---")?;
            writeln!(output, "Account: {} | Holder: {}", current.id, current.holder)?;
            writeln!(output, "Current balance: ${:.2}", current.balance)?;
        }
        DEPOSIT => {
            let amount = prompt_amount(input, output, "Amount to deposit: ")?;
            let balance = teller.deposit(id, amount)?;
            writeln!(output, "Deposit complete. New balance: ${:.2}", balance)?;
        }
        WITHDRAW => {
            let amount = prompt_amount(input, output, "Amount to withdraw: ")?;
            let balance = teller.withdraw(id, amount)?;
            writeln!(output, "Withdrawal complete. New balance: ${:.2}", balance)?;
        }
        TRANSFER => {
            let to = prompt_account_id(input, output, "Destination account id: ")?;
            teller.inquire(to)?;
            let amount = prompt_amount(input, output, "Amount to transfer: ")?;
            let receipt = teller.transfer(id, to, amount)?;
            writeln!(output, "Transfer complete.")?;
            writeln!(
                output,
                "New balance of source account ({}): ${:.2}",
                id, receipt.source_balance
            )?;
            writeln!(
                output,
                "New balance of destination account ({}): ${:.2}",
                to, receipt.destination_balance
            )?;
        }
        _ => {
            writeln!(output, "Invalid option.")?;
        }
    }

    Ok(Flow::Continue)
}

fn write_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "====== ACCOUNT TELLER ======")?;
    writeln!(output, "1. Balance inquiry")?;
    writeln!(output, "2. Deposit")?;
    writeln!(output, "3. Withdraw")?;
    writeln!(output, "4. Transfer")?;
    writeln!(output, "5. Exit")?;
    write!(output, "Select an option: ")?;
    output.flush()
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<String, TellerError> {
    write!(output, "{}", message)?;
    output.flush()?;

    read_line(input)?.ok_or_else(|| TellerError::Io(io::ErrorKind::UnexpectedEof.into()))
}

fn prompt_account_id(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<u32, TellerError> {
    let line = prompt(input, output, message)?;
    line.trim().parse().map_err(|_| {
        TellerError::InvalidInput(format!("`{}` is not an account id", line.trim()))
    })
}

fn prompt_amount(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<Decimal, TellerError> {
    let line = prompt(input, output, message)?;
    line.trim().parse().map_err(|_| {
        TellerError::InvalidInput(format!("`{}` is not an amount", line.trim()))
    })
}

/// `None` means end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
