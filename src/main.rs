use clap::Parser;
use rdw_vehicle::utils::{logger, validation::Validate};
use rdw_vehicle::{CliConfig, ErrorKind, RdwClient, RdwError, Vehicle, VehicleLookup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.client_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let client = RdwClient::new(config);

    let result = lookup(&client, cli.license_plate.as_deref()).await;
    match result {
        Ok(vehicle) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&vehicle)?);
            } else {
                print_summary(&vehicle);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Lookup failed: {} (Category: {:?}, retryable: {})",
                e,
                e.kind(),
                e.is_retryable()
            );
            // process::exit 不會跑 Drop
            drop(client);
            exit_with(&e);
        }
    }

    Ok(())
}

async fn lookup(
    source: &dyn VehicleLookup,
    license_plate: Option<&str>,
) -> rdw_vehicle::Result<Vehicle> {
    source.fetch(license_plate).await
}

fn exit_with(e: &RdwError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.kind() {
        ErrorKind::Configuration => 1,
        ErrorKind::Connectivity => 2,
        ErrorKind::Protocol | ErrorKind::Parse => 3,
        ErrorKind::NotFound => 4,
    };
    std::process::exit(exit_code);
}

fn print_summary(vehicle: &Vehicle) {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    println!("🚗 {} {} ({})", vehicle.brand, vehicle.model, vehicle.license_plate);
    println!(
        "   Type:            {}",
        or_dash(vehicle.vehicle_type.map(|t| t.as_str().to_string()))
    );
    println!(
        "   Interior:        {}",
        or_dash(vehicle.interior.map(|i| i.as_str().to_string()))
    );
    println!(
        "   First admission: {}",
        or_dash(vehicle.first_admission.map(|d| d.to_string()))
    );
    println!(
        "   APK expires:     {}",
        or_dash(vehicle.apk_expiration.map(|d| d.to_string()))
    );
    println!(
        "   Engine:          {}",
        or_dash(vehicle.engine_capacity.map(|c| format!("{} cc", c)))
    );
    println!(
        "   Mass (empty):    {}",
        or_dash(vehicle.mass_empty.map(|m| format!("{} kg", m)))
    );
    println!("   Energy label:    {}", or_dash(vehicle.energy_label.clone()));
    println!("   Insured:         {}", yes_no(vehicle.liability_insured));
    println!("   Pending recall:  {}", yes_no(vehicle.pending_recall));
    println!("   Taxi:            {}", yes_no(vehicle.taxi));
    println!("   Exported:        {}", yes_no(vehicle.exported));
}
