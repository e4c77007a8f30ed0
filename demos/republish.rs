use allegro_webapi::prelude::*;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let config = Config::new();
    info!("Using {:?} service", config.soap.environment());

    let mut client = WebApiClient::from_config(&config)?;
    client.connect_with(&config.credentials).await?;

    let not_sold = client.do_get_my_not_sold_items().await?;
    info!("Not sold items: {}", not_sold);

    match client.republish_not_sold_items().await? {
        RepublishOutcome::Relisted(responses) => {
            for response in responses {
                info!("Relisted: {}", response);
            }
        }
        RepublishOutcome::NothingToDo => {
            info!("List of not sold items is empty right now. Skipping.")
        }
    }

    Ok(())
}
