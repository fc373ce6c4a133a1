// gsm-rs: Git Submodule Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch naming commands.

use crate::cli::naming::{NameArgs, PrefixesArgs};
use crate::error::Result;
use crate::naming::{BranchNamingRequest, build_branch_name, legal_prefixes, preview_branch_name};

/// Turns CLI arguments into a naming request.
#[must_use]
pub fn naming_request(args: &NameArgs) -> BranchNamingRequest {
    BranchNamingRequest::builder()
        .prefix(args.prefix)
        .maybe_base_branch(args.base.clone())
        .maybe_ticket_id(args.ticket.clone())
        .maybe_title(args.title.clone())
        .maybe_product(args.product.clone())
        .maybe_version(args.product_version.clone())
        .maybe_name(args.name.clone())
        .build()
}

/// Prints the branch name for the given parts.
///
/// # Errors
///
/// Returns a naming error unless `--preview` is set.
pub fn run_name_command(args: &NameArgs) -> Result<()> {
    let request = naming_request(args);
    let name = if args.preview {
        preview_branch_name(&request)
    } else {
        build_branch_name(&request)?
    };
    println!("{name}");
    Ok(())
}

/// Prints the prefixes allowed from a base branch, one per line.
pub fn run_prefixes_command(args: &PrefixesArgs) {
    for prefix in legal_prefixes(&args.base) {
        println!("{prefix}");
    }
}
