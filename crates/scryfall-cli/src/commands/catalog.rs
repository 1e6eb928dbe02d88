use anyhow::Result;

use scryfall_client::ScryfallClient;
use scryfall_core::vocab::CatalogName;

use super::output::print_json;

pub async fn run_catalog(client: &ScryfallClient, name: CatalogName, json: bool) -> Result<()> {
    let catalog = client.catalog(name).await?;
    if json {
        return print_json(&catalog);
    }
    for value in catalog.iter() {
        println!("{value}");
    }
    log::info!("{} values in {name}", catalog.total_values);
    Ok(())
}
