// src/app.rs
//! CLI 引数から集計を実行し、結果を書き出す

use std::borrow::Cow;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use code_counter_core::{
    ClassificationResult, CounterConfig, LanguageTable, LineCounter, Source, builtin_table,
};
use code_counter_shared_kernel::{ErrorContext, Result};
use log::info;

use crate::cli::{self, Args};
use crate::presentation::Printer;

/// 1つの入力
#[derive(Debug, Clone, Copy)]
enum Input<'a> {
    Stdin,
    File(&'a Path),
    Text(&'a str),
}

impl<'a> Input<'a> {
    fn collect(args: &'a Args) -> Vec<Self> {
        if let Some(text) = &args.text {
            return vec![Self::Text(text)];
        }
        if args.inputs.is_empty() {
            return vec![Self::Stdin];
        }
        args.inputs
            .iter()
            .map(|path| if path.as_os_str() == "-" { Self::Stdin } else { Self::File(path) })
            .collect()
    }

    fn source<'s, R>(self, stdin: &'s mut R) -> Source<'s>
    where
        'a: 's,
        R: Read + ?Sized + 's,
    {
        match self {
            Self::Stdin => Source::reader(stdin),
            Self::File(path) => Source::path(path),
            Self::Text(text) => Source::text(text),
        }
    }
}

impl fmt::Display for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Text(_) => f.write_str("<text>"),
        }
    }
}

fn load_table(args: &Args) -> Result<Cow<'static, LanguageTable>> {
    match &args.languages {
        Some(path) => Ok(Cow::Owned(LanguageTable::load(path)?)),
        None => Ok(Cow::Borrowed(builtin_table())),
    }
}

/// 引数に従って集計し、`out` に書き出す
pub fn run(args: &Args, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    cli::validate(args)?;
    let table = load_table(args)?;

    let mut printer = Printer::new(out, args.format.into(), &args.delimiter);
    if args.list_languages {
        printer.print_languages(&table)?;
        return Ok(());
    }

    let config = CounterConfig::try_from(args)?;
    let mut counter =
        LineCounter::new(config, &table).context("resolving the default language")?;

    let inputs = Input::collect(args);
    let labelled = !args.cumulative && (inputs.len() > 1 || args.total);
    let mut total = ClassificationResult::default();
    let mut latest = None;

    for input in &inputs {
        let result = counter
            .classify(input.source(&mut *stdin), None, args.by_suffix)
            .with_context(|| format!("classifying {input}"))?;
        info!("{input}: {} line(s) as {}", result.total_lines(), result.language);

        if !args.cumulative {
            let label = labelled.then(|| input.to_string());
            printer.print(&counter.render(&result)?, label.as_deref())?;
        }
        total = total.merge(&result);
        latest = Some(result);
    }

    if args.cumulative {
        if let Some(result) = latest {
            printer.print(&counter.render(&result)?, None)?;
        }
    } else if args.total {
        printer.print(&counter.render(&total)?, Some("total"))?;
    }

    printer.flush()?;
    Ok(())
}
