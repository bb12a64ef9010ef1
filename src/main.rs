mod localization;
use crate::localization::*;
use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use color_print::cformat;
use scloc_lib::{
    ruleset::CstoneClient, ApplyReport, GenerateReport, GenerationDriver, Result, Settings,
};
use std::{path::PathBuf, process::exit, time::Instant};
use sys_locale::get_locale;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn preparse_args() -> Language {
    let preparse = Command::new("preparse")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .ignore_errors(true)
        .args([Arg::new("language")
            .short('l')
            .long("language")
            .value_parser(["en", "zh"])]);
    let mut preparse_matches = preparse.get_matches();
    let language_arg = preparse_matches.remove_one::<String>("language");

    let language = language_arg.unwrap_or_else(|| {
        let locale = get_locale().unwrap_or(String::from("en-US"));

        if let Some((lang, _)) = locale.split_once('-') {
            lang.to_owned()
        } else {
            locale
        }
    });

    match language.as_str() {
        "zh" => Language::Chinese,
        _ => Language::English,
    }
}

fn setup_cli(localization: &Localization<'static>) -> Command {
    let input_dir_arg = Arg::new("input-dir")
        .short('i')
        .long("input-dir")
        .help(localization.input_dir_arg_desc)
        .value_name(localization.input_path_arg_type)
        .value_parser(value_parser!(PathBuf))
        .display_order(1);

    let output_arg = Arg::new("output")
        .short('o')
        .long("output")
        .help(localization.output_arg_desc)
        .value_name(localization.output_path_arg_type)
        .value_parser(value_parser!(PathBuf))
        .display_order(2);

    let custom_dir_arg = Arg::new("custom-dir")
        .short('c')
        .long("custom-dir")
        .help(localization.custom_dir_arg_desc)
        .value_name(localization.input_path_arg_type)
        .value_parser(value_parser!(PathBuf))
        .display_order(3);

    let base_url_arg = Arg::new("base-url")
        .short('u')
        .long("base-url")
        .help(localization.base_url_arg_desc)
        .value_name(localization.url_arg_type)
        .display_order(4);

    let suffix_arg = Arg::new("suffix")
        .short('s')
        .long("suffix")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help(cformat!(
            "{}\n{} --suffix extra.ini,credits.ini",
            localization.suffix_arg_desc,
            localization.example,
        ))
        .value_name(localization.input_path_arg_type)
        .value_parser(value_parser!(PathBuf))
        .display_order(5);

    let language_arg = Arg::new("language")
        .short('l')
        .long("language")
        .value_name(localization.language_arg_type)
        .help(cformat!(
            "{}\n{} --language zh<bold>\n[{} en, zh]</>",
            localization.language_arg_desc,
            localization.example,
            localization.allowed_values,
        ))
        .value_parser(["en", "zh"])
        .display_order(95);

    let log_flag = Arg::new("log")
        .short('L')
        .long("log")
        .action(ArgAction::SetTrue)
        .help(localization.log_arg_desc)
        .display_order(96);

    let version_flag = Arg::new("version")
        .short('v')
        .long("version")
        .action(ArgAction::Version)
        .help(localization.version_flag_desc)
        .display_order(98);

    let help_flag = Arg::new("help")
        .short('h')
        .long("help")
        .help(localization.help_arg_desc)
        .action(ArgAction::Help)
        .display_order(99);

    Command::new("scloc-gen")
        .version(crate_version!())
        .disable_version_flag(true)
        .disable_help_flag(true)
        .next_line_help(true)
        .term_width(120)
        .about(localization.about_msg)
        .help_template(localization.help_template)
        .args([
            input_dir_arg,
            output_arg,
            custom_dir_arg,
            base_url_arg,
            suffix_arg,
            language_arg,
            log_flag,
            help_flag,
            version_flag,
        ])
        .hide_possible_values(true)
}

fn settings_from_matches(matches: &ArgMatches) -> Settings {
    let mut settings = Settings::default();

    if let Some(input_dir) = matches.get_one::<PathBuf>("input-dir") {
        settings = settings.input_dir(input_dir.clone());
    }

    if let Some(output) = matches.get_one::<PathBuf>("output") {
        settings = settings.output_path(output.clone());
    }

    if let Some(custom_dir) = matches.get_one::<PathBuf>("custom-dir") {
        settings = settings.custom_dir(custom_dir.clone());
    }

    if let Some(base_url) = matches.get_one::<String>("base-url") {
        settings = settings.base_url(base_url.clone());
    }

    if let Some(suffix_files) = matches.get_many::<PathBuf>("suffix") {
        settings = settings.suffix_files(suffix_files.cloned().collect());
    }

    settings
}

fn init_logging(logging: bool) {
    let default_level = if logging { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn surface_apply_report(report: &ApplyReport, localization: &Localization) {
    for ids in &report.unresolved {
        warn!("[{}] {} {ids}", report.ruleset, localization.unresolved_id_msg);
    }

    for (id, err) in &report.failed {
        warn!("[{}] {} {id}: {err}", report.ruleset, localization.translate_failed_msg);
    }

    info!(
        "{} {} {} {}/{}/{}/{}",
        localization.ruleset_msg,
        report.ruleset,
        localization.ruleset_applied_msg,
        report.translated.len(),
        report.skipped.len(),
        report.unresolved.len(),
        report.failed.len()
    );
}

fn surface_generate_report(report: &GenerateReport, settings: &Settings, localization: &Localization) {
    for id in &report.omitted {
        warn!("{} {id}", localization.omitted_id_msg);
    }

    for (path, err) in &report.skipped_suffix_files {
        warn!("{} {}: {err}", localization.suffix_file_skipped_msg, path.display());
    }

    info!(
        "{} {} {}",
        report.written,
        localization.output_written_msg,
        settings.output_path.display()
    );
}

fn run(settings: &Settings, localization: &Localization) -> Result<()> {
    info!("{} {}", localization.loading_text_msg, settings.input_dir.display());
    let mut driver =
        GenerationDriver::load(&settings.en_path(), &settings.cn_path(), &settings.ref_path())?;

    info!("{} {}", localization.grabbing_data_msg, settings.base_url);
    let client = CstoneClient::new(&settings.base_url);
    let rulesets = settings.rulesets(&client)?;

    for report in driver.apply_all(&rulesets) {
        surface_apply_report(&report, localization);
    }

    let extra = [settings.version_entry(&driver)];
    let report = driver.generate(&settings.output_path, &settings.suffix_files, &extra)?;
    surface_generate_report(&report, settings, localization);

    Ok(())
}

fn main() {
    let start_time = Instant::now();

    let language = preparse_args();
    let localization = Localization::new(language);
    let cli = setup_cli(&localization);

    let matches = cli.get_matches();
    init_logging(matches.get_flag("log"));

    let settings = settings_from_matches(&matches);

    if let Err(err) = run(&settings, &localization) {
        eprintln!("{} {err}", localization.fatal_error_msg);
        exit(1);
    }

    println!(
        "{} {:.2}s",
        localization.elapsed_time_msg,
        start_time.elapsed().as_secs_f32()
    );
}
