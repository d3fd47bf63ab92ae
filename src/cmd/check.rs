use crate::reports;
use clap::Args;
use clipforge::design::batch_from_raw;
use clipforge::error::ClipResult;
use clipforge::loader::load_constructs;
use clipforge::reducer::reduce_batch;
use itertools::Itertools;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(short, long)]
    pub constructs: PathBuf,
}

pub fn run(args: &CheckArgs) -> ClipResult<()> {
    let rows = load_constructs(&args.constructs)?;
    let constructs = batch_from_raw(&rows)?;
    let reduced = reduce_batch(&constructs);

    println!("\n🔎 === CONSTRUCT CHECK: {} constructs === 🔎", constructs.len());
    reports::print_triples(&constructs, &reduced);

    let demand: Vec<_> = reduced
        .iter()
        .flatten()
        .counts()
        .into_iter()
        .sorted()
        .collect();
    reports::print_demand(&demand);

    Ok(())
}
