use anyhow::Result;
use sotay_core::{Category, TransactionDraft};
use sotay_nlp::draft_transaction;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::fmt::draft_line;
use crate::state::Journal;

const QUIT_COMMANDS: [&str; 3] = [":q", "quit", "thoát"];

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}

fn is_quit(line: &str) -> bool {
    QUIT_COMMANDS.iter().any(|q| line.eq_ignore_ascii_case(q))
}

/// Line-by-line entry: every message becomes a draft (and a journal line
/// when enabled). Parse failures are shown and the loop keeps going.
pub async fn run_chat(categories: &[Category], mut journal: Option<Journal>) -> Result<()> {
    println!("Nhập giao dịch, ví dụ \"xăng 50k\", \"lương 15tr\". Gõ :q để thoát.");
    if let Some(j) = &journal {
        println!("Nhật ký: {}", j.path().display());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut saved: Vec<TransactionDraft> = Vec::new();

    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            break;
        }

        let today = chrono::Local::now().date_naive();
        match draft_transaction(line, categories, today) {
            Ok(draft) => {
                println!("{}", draft_line(&draft));
                if let Some(j) = journal.as_mut() {
                    j.append(&draft)?;
                }
                saved.push(draft);
            }
            Err(err) => {
                tracing::debug!(input = line, error = %err, "chat entry rejected");
                println!("! {err}");
            }
        }
    }

    let net: i64 = saved.iter().map(TransactionDraft::signed_amount).sum();
    println!("Đã ghi {} giao dịch (ròng {net}đ)", saved.len());
    Ok(())
}
