//! `teapot check-url <origin> <target>` – run the redirect safety check once.

use anyhow::Result;
use teapot_core::origin::Origin;
use teapot_core::redirect::is_safe_target;

pub fn run_check_url(origin: &str, target: &str) -> Result<()> {
    let origin = Origin::from_url(origin)?;
    if is_safe_target(&origin, Some(target)) {
        println!("safe: {target} stays on {}", origin.netloc());
    } else {
        println!("unsafe: {target} would leave {}", origin.netloc());
    }
    Ok(())
}
