use ecohabit_core::ECO_TIPS;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for tip in ECO_TIPS {
        println!("- {tip}");
    }
    Ok(())
}
