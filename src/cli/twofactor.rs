//! Two-factor enrollment command implementation

use base64::{Engine as _, engine::general_purpose::STANDARD};
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::error::{ApiError, Result};

const QR_FILE: &str = "portalops-2fa.png";

/// Run the 2fa setup command
pub async fn setup(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    println!("{}", "Two-factor enrollment".bold());
    println!("\n{}", "Requesting enrollment QR code...".cyan());
    let enrollment = ctx.client.two_factor_generate().await?;

    let png = decode_qr_data_uri(&enrollment.qr_code)?;
    std::fs::write(QR_FILE, png)?;
    println!("{} QR code written to {}", "✓".green(), QR_FILE.cyan());
    println!("  Scan it with your authenticator app, then confirm below.\n");

    let code: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("6-digit code")
        .validate_with(|input: &String| {
            if input.len() == 6 && input.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err("Enter the 6 digits from your authenticator")
            }
        })
        .interact_text()?;

    let status = ctx.client.two_factor_verify(&code).await?;
    println!(
        "\n{} {}",
        "✓".green(),
        status.display("Two-factor authentication enabled")
    );

    // The QR image encodes the shared secret; don't leave it on disk
    let _ = std::fs::remove_file(QR_FILE);

    Ok(())
}

/// Pull the PNG bytes out of a `data:image/png;base64,...` URI
fn decode_qr_data_uri(uri: &str) -> Result<Vec<u8>> {
    let encoded = uri
        .rsplit_once("base64,")
        .map(|(_, rest)| rest)
        .unwrap_or(uri);

    STANDARD.decode(encoded.trim()).map_err(|e| {
        ApiError::InvalidResponse(format!("QR code is not valid base64: {}", e)).into()
    })
}
