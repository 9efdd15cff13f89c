//! # Folio CLI
//!
//! Usage:
//!   folio profile.json -t professional -o resume.pdf
//!   cat profile.json | folio
//!   folio --example > profile.json

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use folio::model::PageSize;
use folio::{ProfileDocument, RenderOptions, Template};

#[derive(Parser, Debug)]
#[command(version, about = "Lay out a profile as a PDF résumé", long_about = None)]
struct Args {
    /// Profile JSON file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Output path. Defaults to the suggested filename, e.g. Jane_Doe_Resume.pdf.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = TemplateArg::Classic)]
    template: TemplateArg,

    /// JSON file with render options. Flags below override it.
    #[arg(long)]
    options: Option<PathBuf>,

    #[arg(long, value_enum)]
    page_size: Option<PageSizeArg>,

    /// Add the achievements section.
    #[arg(long)]
    achievements: bool,

    /// Write content streams without deflate.
    #[arg(long)]
    uncompressed: bool,

    /// Print the draw instructions as JSON instead of writing a PDF.
    #[arg(long)]
    instructions: bool,

    /// Print the plain-text share summary instead of writing a PDF.
    #[arg(long)]
    summary: bool,

    /// Print a sample profile and exit.
    #[arg(long)]
    example: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TemplateArg {
    Classic,
    Professional,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Classic => Template::Classic,
            TemplateArg::Professional => Template::Professional,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PageSizeArg {
    A4,
    A5,
    Letter,
    Legal,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => PageSize::A4,
            PageSizeArg::A5 => PageSize::A5,
            PageSizeArg::Letter => PageSize::Letter,
            PageSizeArg::Legal => PageSize::Legal,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.example {
        print!("{}", example_profile_json());
        return Ok(());
    }

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let profile: ProfileDocument =
        serde_json::from_str(&input).map_err(folio::FolioError::from)?;

    if args.summary {
        println!("{}", folio::share_summary(&profile));
        return Ok(());
    }

    let options = load_options(&args)?;
    let template = Template::from(args.template);

    if args.instructions {
        let list = folio::template::layout(&profile, template, &options)?;
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let export = folio::export(&profile, template, &options)?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&export.filename));
    fs::write(&output, &export.bytes)?;
    eprintln!(
        "✓ Written {} bytes to {}",
        export.bytes.len(),
        output.display()
    );
    Ok(())
}

fn load_options(args: &Args) -> Result<RenderOptions, Box<dyn Error>> {
    let mut options = match &args.options {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => RenderOptions::default(),
    };
    if let Some(size) = args.page_size {
        options.page_size = size.into();
    }
    if args.achievements {
        options.include_achievements = true;
    }
    if args.uncompressed {
        options.compress = false;
    }
    log::debug!("render options: {:?}", options);
    Ok(options)
}

fn example_profile_json() -> &'static str {
    r##"{
  "name": "Priya Sharma",
  "title": "Senior Backend Engineer",
  "graduationYear": "2016",
  "email": "priya.sharma@example.com",
  "phone": "+91 98765 43210",
  "location": "Bengaluru, India",
  "about": "Backend engineer with eight years of experience building payment and logistics platforms. Enjoys turning slow, fragile systems into boring, reliable ones.",
  "currentPosition": "Senior Backend Engineer",
  "company": "Northwind Logistics",
  "skills": ["Rust", "Go", "PostgreSQL", "Kafka", "Kubernetes", "gRPC", "Terraform", "Observability"],
  "education": {
    "degree": "B.Tech, Computer Science",
    "university": "National Institute of Technology, Trichy",
    "gpa": "8.7"
  },
  "experience": [
    {
      "position": "Senior Backend Engineer",
      "company": "Northwind Logistics",
      "duration": "2021 - Present",
      "description": "Led the rewrite of the shipment tracking service, cutting p99 latency from 900ms to 120ms. Designed the event pipeline that now carries forty million updates a day."
    },
    {
      "position": "Software Engineer",
      "company": "Contoso Payments",
      "duration": "2016 - 2021",
      "description": "Built the settlement reconciliation system and the merchant payout scheduler. Mentored four new graduates through their first year."
    }
  ],
  "achievements": [
    "Speaker, RustConf India 2023",
    "Winner, NIT Trichy inter-college hackathon 2015"
  ]
}
"##
}
