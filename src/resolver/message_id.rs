// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A message identifier as sent by the controller.
///
/// `Base.1.0.Success` names registry `Base`, version `1.0`, key `Success`;
/// anything with fewer than three dot-separated segments is a bare key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId<'a> {
    Qualified {
        registry: &'a str,
        version: &'a str,
        key: &'a str,
    },
    Bare(&'a str),
}

impl<'a> MessageId<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if let Some((registry, rest)) = raw.split_once('.') {
            if let Some((version, key)) = rest.rsplit_once('.') {
                return MessageId::Qualified {
                    registry,
                    version,
                    key,
                };
            }
        }
        MessageId::Bare(raw)
    }
}
