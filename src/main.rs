// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use opensimad_render::data_input::table::TimeTable;
use opensimad_render::plot_functions::plot_dataframe::{plot_dataframe, DataframePlotOptions};
use opensimad_render::plot_functions::plot_dataframe_with_shading::plot_dataframe_with_shading;
use opensimad_render::types::Side;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <input1.csv> [input2.csv ...] [options]");
    eprintln!("  --shaded            use the shaded-band plotter (mean +/- SD)");
    eprintln!("  --sd <file.csv>     SD table paired with the inputs in order (repeatable)");
    eprintln!("  --side <r|l>        side selector for shaded plots");
    eprintln!("  --label <text>      legend label, one per input (repeatable)");
    eprintln!("  --title <text>      figure title");
    eprintln!("  --output <file.png> output file (default: derived from first input)");
}

struct CliArgs {
    inputs: Vec<String>,
    sd_files: Vec<String>,
    labels: Vec<String>,
    side: Option<Side>,
    title: Option<String>,
    output: Option<String>,
    shaded: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        inputs: Vec::new(),
        sd_files: Vec::new(),
        labels: Vec::new(),
        side: None,
        title: None,
        output: None,
        shaded: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value_for = |flag: &str| -> Result<String, String> {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--shaded" => parsed.shaded = true,
            "--sd" => parsed.sd_files.push(value_for("--sd")?),
            "--label" => parsed.labels.push(value_for("--label")?),
            "--title" => parsed.title = Some(value_for("--title")?),
            "--output" => parsed.output = Some(value_for("--output")?),
            "--side" => {
                let value = value_for("--side")?;
                parsed.side = Some(
                    Side::from_arg(&value).ok_or_else(|| format!("invalid side '{value}'"))?,
                );
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            input => parsed.inputs.push(input.to_string()),
        }
    }

    if parsed.inputs.is_empty() {
        return Err("no input files given".to_string());
    }
    if !parsed.sd_files.is_empty() && parsed.sd_files.len() != parsed.inputs.len() {
        return Err(format!(
            "got {} --sd files for {} inputs",
            parsed.sd_files.len(),
            parsed.inputs.len()
        ));
    }
    Ok(parsed)
}

fn default_output(first_input: &str, suffix: &str) -> String {
    let stem = Path::new(first_input)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    format!("{stem}_{suffix}.png")
}

fn run(cli: &CliArgs) -> Result<(), Box<dyn Error>> {
    let mut tables = Vec::with_capacity(cli.inputs.len());
    for input in &cli.inputs {
        println!("Reading '{input}'...");
        let table = TimeTable::from_csv(Path::new(input))?;
        println!(
            "  {} columns, {} rows.",
            table.n_columns(),
            table.n_rows()
        );
        tables.push(table);
    }

    if cli.shaded {
        let mut sd_tables = Vec::with_capacity(cli.sd_files.len());
        for sd_file in &cli.sd_files {
            println!("Reading SD table '{sd_file}'...");
            sd_tables.push(TimeTable::from_csv(Path::new(sd_file))?);
        }
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output(&cli.inputs[0], "shaded"));
        let sides: Vec<Option<Side>> = vec![cli.side; tables.len()];
        plot_dataframe_with_shading(
            &tables,
            if sd_tables.is_empty() { None } else { Some(sd_tables.as_slice()) },
            None,
            &sides,
            Some("Sample"),
            cli.title.as_deref(),
            if cli.labels.is_empty() { None } else { Some(cli.labels.as_slice()) },
            &output,
        )
    } else {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output(&cli.inputs[0], "dataframe"));
        let options = DataframePlotOptions {
            labels: if cli.labels.is_empty() { None } else { Some(cli.labels.clone()) },
            title: cli.title.clone(),
            ..Default::default()
        };
        plot_dataframe(&tables, &options, &output)
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    println!("opensimad-render {}", opensimad_render::crate_version());
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let cli = match parse_args(&args[1..]) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
