//! Rendering results to stdout, as text or JSON.

use anyhow::Result;
use serde_json::json;

use notable_pipeline::{
    assess_notability, BatchReport, CategorizedResult, Category, FallbackOrchestrator,
    NotabilityVerdict,
};

/// Best-known work for each verified or notable person in the report.
pub async fn research_best_work(
    orchestrator: &FallbackOrchestrator,
    report: &BatchReport,
) -> Vec<(String, String)> {
    let mut works = Vec::new();
    for result in report.results().iter().filter(|r| worth_researching(r)) {
        let work = orchestrator
            .identifier()
            .research_best_work(&result.name, result.details.as_str())
            .await;
        works.push((result.name.clone(), work));
    }
    works
}

fn worth_researching(result: &CategorizedResult) -> bool {
    result.category == Category::VerifiedNotable
        || assess_notability(result.details.as_str()) == NotabilityVerdict::Yes
}

pub fn print_single(result: &CategorizedResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("{}", result.name);
    println!("{} (Confidence: {})", result.category, result.confidence);
    println!();
    println!("{}", result.details);
    Ok(())
}

pub fn print_report(report: &BatchReport, best_work: &[(String, String)], json: bool) -> Result<()> {
    if json {
        let counts: serde_json::Map<String, serde_json::Value> = report
            .counts()
            .iter()
            .map(|(category, n)| (category.label().to_string(), json!(n)))
            .collect();
        let works: serde_json::Map<String, serde_json::Value> = best_work
            .iter()
            .map(|(name, work)| (name.clone(), json!(work)))
            .collect();
        let value = json!({
            "results": report.results(),
            "counts": counts,
            "total": report.total(),
            "verification_rate": report.verification_rate(),
            "best_work": works,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{report}");
    if !best_work.is_empty() {
        println!();
        println!("BEST-KNOWN WORK");
        println!("{}", "-".repeat(80));
        for (name, work) in best_work {
            println!();
            println!("  {name}");
            for line in work.lines().map(str::trim).filter(|l| !l.is_empty()) {
                println!("    {line}");
            }
        }
    }
    Ok(())
}
