// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `folio login` / `register` / `logout` / `whoami`.

use crate::auth::Auth;
use crate::identity::RegisterRequest;

#[derive(Debug, clap::Args)]
pub struct LoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long, env = "FOLIO_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, clap::Args)]
pub struct RegisterArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long, env = "FOLIO_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// First name.
    #[arg(long)]
    pub first_name: Option<String>,
    /// Last name.
    #[arg(long)]
    pub last_name: Option<String>,
    /// Contact phone number.
    #[arg(long)]
    pub phone_number: String,
}

pub async fn login(auth: &Auth, args: &LoginArgs) -> i32 {
    match auth.login(&args.email, &args.password).await {
        Ok(profile) => {
            println!("Logged in as {}.", profile.email);
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

pub async fn register(auth: &Auth, args: &RegisterArgs) -> i32 {
    let req = RegisterRequest {
        email: args.email.clone(),
        password: args.password.clone(),
        phone_number: args.phone_number.clone(),
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
    };
    match auth.register(req).await {
        Ok(profile) => {
            println!("Registered and logged in as {}.", profile.email);
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

pub fn logout(auth: &Auth) -> i32 {
    auth.logout();
    println!("Logged out.");
    0
}

pub async fn whoami(auth: &Auth) -> i32 {
    let Some(profile) = auth.cache.refresh(&auth.client).await else {
        eprintln!("error: not logged in (run `folio login`)");
        return 2;
    };

    println!("{:<14} {}", "id", profile.id);
    println!("{:<14} {}", "email", profile.email);
    if let Some(ref first) = profile.first_name {
        println!("{:<14} {}", "first name", first);
    }
    if let Some(ref last) = profile.last_name {
        println!("{:<14} {}", "last name", last);
    }
    if let Some(ref phone) = profile.phone_number {
        println!("{:<14} {}", "phone", phone);
    }
    println!("{:<14} {}", "staff", profile.is_staff);
    0
}
