use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use geoscore::{
    analyze_geo_patterns, content_quality, content_recommendations, get_insights, keyword_density,
    AnalysisResult, GeoConfig, GeoConfigFile, GeoEngine, MultiSourceAnalysisResult,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "geoscore")]
#[command(version, about = "Measure how much of a source text an AI-generated answer reuses", long_about = None)]
struct Cli {
    /// Emit logs as JSON (verbosity via RUST_LOG)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one source against a response
    Analyze {
        /// Source text file
        #[arg(short, long)]
        source: PathBuf,

        /// Response text file
        #[arg(short, long)]
        response: PathBuf,

        /// Query that produced the response
        #[arg(short, long)]
        query: Option<String>,

        /// YAML engine configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank several sources against one response
    Multi {
        /// Source text files
        #[arg(short, long, num_args = 1.., required = true)]
        sources: Vec<PathBuf>,

        /// Response text file
        #[arg(short, long)]
        response: PathBuf,

        /// Query that produced the response
        #[arg(short, long)]
        query: Option<String>,

        /// YAML engine configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// GEO phrasing patterns, keywords and quality scores of a single text
    Content {
        /// Text file to inspect
        file: PathBuf,

        /// Number of keywords to report
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Analyze {
            source,
            response,
            query,
            config,
            json,
        } => {
            let engine = GeoEngine::new(load_config(config.as_deref())?);
            let source = read_text(&source)?;
            let response = read_text(&response)?;
            let result = engine.analyze(&source, &response, query.as_deref())?;
            if json {
                print_json(&result)?;
            } else {
                print_analysis(&result);
            }
        }
        Commands::Multi {
            sources,
            response,
            query,
            config,
            json,
        } => {
            let engine = GeoEngine::new(load_config(config.as_deref())?);
            let texts = sources
                .iter()
                .map(|path| read_text(path))
                .collect::<Result<Vec<_>, _>>()?;
            let response = read_text(&response)?;
            let result = engine.analyze_multiple(&texts, &response, query.as_deref())?;
            if json {
                print_json(&result)?;
            } else {
                print_multi(&sources, &result);
            }
        }
        Commands::Content { file, top, json } => {
            let text = read_text(&file)?;
            print_content(&text, top, json)?;
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&Path>) -> Result<GeoConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(GeoConfigFile::from_file(path)?.to_config()),
        None => Ok(GeoConfig::default()),
    }
}

fn read_text(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|err| format!("cannot read {}: {err}", path.display()).into())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    println!("Visibility: {}/100", result.visibility);
    println!(
        "Word count: {:.1}%  Position adjusted: {:.1}%",
        result.metrics.word_count.percent(),
        result.metrics.position_adjusted.percent()
    );
    if let Some(semantic) = &result.metrics.semantic {
        println!("Lexical overlap: {:.1}%", semantic.percent());
    }
    println!();
    println!("{}", result.explanation);

    if !result.matches.is_empty() {
        println!();
        println!("Matches:");
        for record in &result.matches {
            println!(
                "  [{}] {} ({:.2}): {}",
                record.position, record.kind, record.similarity, record.source_text
            );
        }
    }

    let insights = get_insights(result);
    if !insights.is_empty() {
        println!();
        for insight in insights {
            println!("  {:?}: {}", insight.kind, insight.message);
        }
    }
}

fn print_multi(paths: &[PathBuf], result: &MultiSourceAnalysisResult) {
    println!(
        "{} sources, average visibility {:.1}",
        result.summary.total_sources, result.summary.average_visibility
    );
    for (rank, &index) in result.summary.ranking.iter().enumerate() {
        println!(
            "  {}. {:>3}/100  {}",
            rank + 1,
            result.results[index].visibility,
            paths[index].display()
        );
    }
}

#[derive(Serialize)]
struct ContentReport {
    patterns: geoscore::GeoPatternAnalysis,
    keywords: Vec<geoscore::KeywordDensity>,
    quality: geoscore::ContentQuality,
    recommendations: Vec<geoscore::Recommendation>,
}

fn print_content(text: &str, top: usize, json: bool) -> Result<(), Box<dyn Error>> {
    let patterns = analyze_geo_patterns(text);
    let quality = content_quality(text);
    let report = ContentReport {
        recommendations: content_recommendations(&patterns, &quality),
        keywords: keyword_density(text, top),
        patterns,
        quality,
    };
    if json {
        return print_json(&report);
    }

    println!("Quality: {:.2} overall", report.quality.overall_score);
    println!(
        "  length {:.2}, readability {:.2}, structure {:.2}",
        report.quality.length_score,
        report.quality.readability_score,
        report.quality.structure_score
    );
    println!(
        "Patterns: authority {}, statistics {}, citations {}, expert language {}",
        report.patterns.authority.count,
        report.patterns.statistics.count,
        report.patterns.citations.count,
        report.patterns.expert_language.count
    );
    println!("Keywords:");
    for keyword in &report.keywords {
        println!("  {:<20} {:>4} {:.2}%", keyword.word, keyword.count, keyword.density * 100.0);
    }
    for recommendation in &report.recommendations {
        println!("- {}", recommendation.message);
    }
    Ok(())
}
