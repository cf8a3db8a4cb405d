// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_exception::Result;

use crate::clusters::Address;

/// Identity of one worker node. Many blocks reference one node; the
/// address is kept as the validated "host:port" string so the identity
/// hashes and serializes plainly.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub name: String,
    pub address: String,
}

impl Node {
    pub fn try_create(name: &str, address: &str) -> Result<Node> {
        // reject malformed addresses up front
        Address::create(address)?;

        Ok(Node {
            name: name.to_string(),
            address: address.to_string(),
        })
    }

    pub fn address(&self) -> Result<Address> {
        Address::create(&self.address)
    }
}
