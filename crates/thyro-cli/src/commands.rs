use std::io;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use thyro_core::{Classifier, RawLabInput, load_ranges};
use thyro_guide::CalculatorSession;
use thyro_model::{Analyte, ReferenceRanges};
use thyro_cli::interactive::run_guide;
use thyro_cli::logging::redact_value;
use thyro_cli::report::{ClassificationReport, RangeReport};
use thyro_cli::summary::{print_ranges, print_report};

use crate::cli::{ClassifyArgs, GuideArgs, OutputFormatArg, RangeFileArg, RangesArgs};

fn effective_ranges(arg: &RangeFileArg) -> Result<ReferenceRanges> {
    let path = arg.ranges.as_deref();
    load_ranges(path).with_context(|| match path {
        Some(path) => format!("load reference ranges from {}", path.display()),
        None => "load default reference ranges".to_string(),
    })
}

fn raw_input(args: &ClassifyArgs) -> RawLabInput {
    RawLabInput {
        tsh: args.tsh.clone(),
        ft4: args.ft4.clone(),
        ft3: args.ft3.clone(),
        tt4: args.tt4.clone(),
        tt3: args.tt3.clone(),
    }
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let span = info_span!("classify");
    let _guard = span.enter();
    let classifier = Classifier::new(effective_ranges(&args.range_file)?);
    let raw = raw_input(args);
    for analyte in Analyte::ALL {
        if let Some(text) = raw.get(analyte) {
            debug!(analyte = analyte.code(), value = redact_value(text), "field received");
        }
    }
    let report = ClassificationReport::build(&classifier, &raw.to_panel());
    match args.format {
        OutputFormatArg::Table => print_report(&report),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_ranges(args: &RangesArgs) -> Result<()> {
    let report = RangeReport::build(&effective_ranges(&args.range_file)?);
    match args.format {
        OutputFormatArg::Table => print_ranges(&report),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize ranges")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_guide_session(args: &GuideArgs) -> Result<()> {
    let classifier = Classifier::new(effective_ranges(&args.range_file)?);
    let mut session = CalculatorSession::new(classifier);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_guide(&mut session, &mut input, &mut out).context("interactive session")?;
    Ok(())
}
