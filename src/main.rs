use nostr_fee_ticker::bot::RunOutcome;
use nostr_fee_ticker::configuration::get_configuration;
use nostr_fee_ticker::startup::Application;
use nostr_fee_ticker::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("nostr_fee_ticker".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration)?;
    match application.run_until_stopped().await {
        Ok(RunOutcome::Posted { id }) => {
            tracing::info!("run complete, posted note {}", id);
            Ok(())
        }
        Ok(RunOutcome::DryRun { .. }) => {
            tracing::info!("run complete, dry run");
            Ok(())
        }
        Err(e) => {
            tracing::error!("retry failed: {:?}", e);
            std::process::exit(1);
        }
    }
}
