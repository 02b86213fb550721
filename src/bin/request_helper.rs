// src/bin/request_helper.rs
//! Command-line front end for the request helpers

use anyhow::{bail, Context, Result};
use request_helper::{
    hash_secret, respond_error, respond_ok, verify_secret, ArrayKey, Diff, ResponseContext, Secret,
};
use rpassword::prompt_password;
use serde_json::Value;
use tracing::info;

const USAGE: &str = "usage:
  request_helper hash [secret]
  request_helper verify <digest> [secret]
  request_helper diff <a,b,c> <b,c,d>   (only canonical integers count as numbers)
  request_helper ok [message]
  request_helper error <code> <message>";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["hash", rest @ ..] => {
            let secret = secret_arg(rest.first().copied())?;
            println!("{}", hash_secret(&secret).context("hashing failed")?);
        }
        ["verify", digest, rest @ ..] => {
            let secret = secret_arg(rest.first().copied())?;
            let matched = verify_secret(&secret, digest);
            println!("{matched}");
            if !matched {
                std::process::exit(1);
            }
        }
        ["diff", a, b] => {
            let diff = Diff::between(&ArrayKey::parse_list(a), &ArrayKey::parse_list(b));
            info!(
                increase = diff.increase.len(),
                decrease = diff.decrease.len(),
                "diff computed"
            );
            println!("{}", serde_json::to_string_pretty(&diff)?);
        }
        ["ok", rest @ ..] => {
            let mut ctx = ResponseContext::new();
            respond_ok::<_, Value>(&mut ctx, None, rest.first().copied(), None)?;
            print_response(&ctx)?;
        }
        ["error", code, message] => {
            let code: i64 = code.parse().with_context(|| format!("invalid code {code:?}"))?;
            let mut ctx = ResponseContext::new();
            respond_error(&mut ctx, code, message)?;
            print_response(&ctx)?;
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}

fn secret_arg(arg: Option<&str>) -> Result<Secret> {
    let secret = match arg {
        Some(secret) => secret.to_owned(),
        None => prompt_password("Secret: ").context("failed to read secret")?,
    };
    Ok(Secret::new(secret))
}

fn print_response(ctx: &ResponseContext) -> Result<()> {
    println!("status: {}", ctx.status());
    if let Some(body) = ctx.body_string()? {
        println!("{body}");
    }
    Ok(())
}
