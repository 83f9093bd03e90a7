//! Subcommand implementations for the `bdfd` binary.

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use bdfd_api::{BdfdClient, Info, Resource, ResourceApi};

use crate::render;

/// What to fetch from a function or callback family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceQuery {
    Info(String),
    List,
    Tags,
}

/// Run a query against one family and print the result.
pub async fn run_resource<R>(
    api: ResourceApi<'_, R>,
    query: ResourceQuery,
    json: bool,
) -> Result<ExitCode>
where
    R: Resource,
    R::Info: Serialize + Into<Info>,
{
    match query {
        ResourceQuery::Info(tag) => {
            let Some(info) = api.info(&tag).await.context("lookup failed")? else {
                eprintln!("No {} matches '{tag}'", R::FAMILY);
                return Ok(ExitCode::FAILURE);
            };
            if json {
                print_json(&info)?;
            } else {
                print!("{}", render::info(&info.into()));
            }
        }
        ResourceQuery::List => {
            let list = api.list().await.context("listing failed")?;
            if json {
                print_json(&list)?;
            } else {
                for item in list {
                    println!("{}", render::info(&item.into()));
                }
            }
        }
        ResourceQuery::Tags => {
            let tags = api.tag_list().await.context("tag listing failed")?;
            if json {
                print_json(&tags)?;
            } else {
                for tag in tags {
                    println!("{tag}");
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print both node tiers.
pub async fn run_nodes(client: &BdfdClient, json: bool) -> Result<ExitCode> {
    let tiers = client.nodes().list().await?;
    if json {
        print_json(&tiers)?;
    } else {
        for tier in &tiers {
            println!("{}", render::tier(tier));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
