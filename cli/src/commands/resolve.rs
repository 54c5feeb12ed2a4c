use std::time::{Duration, Instant};

use anyhow::Context;
use hostprobe_common::config::Config;
use hostprobe_common::host::Host;
use hostprobe_common::{input, success};
use hostprobe_core::dispatch::Dispatcher;
use hostprobe_core::probe::SystemResolver;
use hostprobe_core::sink::{FileSink, ResultSink};
use hostprobe_core::validator::Validator;
use indicatif::ProgressStyle;
use tracing::info_span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::CommandLine;
use crate::terminal::print;

const PROGRESS_TEMPLATE: &str = "{spinner:.blue} {msg} [{bar:30.green/bright_black}] {pos}/{len}";

pub fn resolve(cli: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let hosts: Vec<Host> = input::collect_hosts(cli.site.as_deref(), cli.file.as_deref())?;
    let unit: &str = if hosts.len() == 1 { "host has" } else { "hosts have" };
    success!("{} {unit} been loaded", hosts.len());

    let dispatcher = Dispatcher::from_config(cfg);
    let to_check: usize = dispatcher.submitted(&hosts).len();

    print::header("resolving", cfg.quiet);

    let span = info_span!("resolution", indicatif.pb_show = true);
    span.pb_set_style(
        &ProgressStyle::with_template(PROGRESS_TEMPLATE).context("building progress style")?,
    );
    span.pb_set_length(to_check as u64);
    span.pb_set_message("Checking hosts");

    let start_time: Instant = Instant::now();
    let validator = Validator::new(SystemResolver);
    let report = |_checked: usize| span.pb_inc(1);

    let results = {
        let _guard = span.enter();
        dispatcher.run(&hosts, &validator, Some(&report))?
    };
    let elapsed: Duration = start_time.elapsed();
    drop(span);

    if cfg.quiet == 0 && !results.is_empty() {
        print::header("resolved hosts", cfg.quiet);
        for (idx, form) in results.iter().enumerate() {
            print::tree_head(idx, form);
        }
    }

    let resolved: usize = results.len();
    FileSink::new(&cfg.output).write(results)?;
    success!("Results written to {}", cfg.output.display());

    print::summary(to_check, resolved, elapsed, &cfg.output, cfg.quiet);
    Ok(())
}
