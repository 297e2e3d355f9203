//! UnixFS file DAG construction in dag-pb blocks.
//!
//! Only the pieces needed to reproduce the root multihash are built; blocks
//! are hashed and dropped as soon as their parent has recorded them.

use prost::encoding::{WireType, encode_key, encode_varint};

use crate::multihash::multihash;

/// Fixed chunker size used by the IPFS importer defaults.
pub(crate) const CHUNK_SIZE: usize = 262_144;

/// Maximum links per node in the balanced layout.
pub(crate) const MAX_LINKS: usize = 174;

/// UnixFS `DataType::File`.
const UNIXFS_FILE: u64 = 2;

// UnixFS `Data` message fields.
const UNIXFS_TYPE: u32 = 1;
const UNIXFS_DATA: u32 = 2;
const UNIXFS_FILESIZE: u32 = 3;
const UNIXFS_BLOCKSIZES: u32 = 4;

// dag-pb `PBNode` / `PBLink` fields.
const PB_NODE_DATA: u32 = 1;
const PB_NODE_LINKS: u32 = 2;
const PB_LINK_HASH: u32 = 1;
const PB_LINK_NAME: u32 = 2;
const PB_LINK_TSIZE: u32 = 3;

/// A block that has been hashed, with the sizes its parent needs.
#[derive(Clone, Debug)]
struct Node {
    multihash: Vec<u8>,
    /// Serialized block length plus the cumulative size of everything below it.
    tsize:     u64,
    /// Number of file bytes this subtree covers.
    file_size: u64,
}

impl Node {
    fn leaf(chunk: &[u8]) -> Self {
        let file_size = chunk.len() as u64;
        let block = encode_node(&[], &encode_file_data(chunk, file_size, &[]));
        Self {
            multihash: multihash(&block),
            tsize: block.len() as u64,
            file_size,
        }
    }

    fn parent(children: &[Node]) -> Self {
        let blocksizes: Vec<u64> = children.iter().map(|c| c.file_size).collect();
        let file_size = blocksizes.iter().sum();
        let block = encode_node(children, &encode_file_data(&[], file_size, &blocksizes));
        let tsize = block.len() as u64 + children.iter().map(|c| c.tsize).sum::<u64>();
        Self {
            multihash: multihash(&block),
            tsize,
            file_size,
        }
    }
}

/// Root multihash of the UnixFS DAG for `bytes`.
pub(crate) fn root_multihash(bytes: &[u8]) -> Vec<u8> {
    let mut level: Vec<Node> = if bytes.is_empty() {
        vec![Node::leaf(&[])]
    } else {
        bytes.chunks(CHUNK_SIZE).map(Node::leaf).collect()
    };

    while level.len() > 1 {
        level = level.chunks(MAX_LINKS).map(Node::parent).collect();
    }

    level.pop().map(|root| root.multihash).unwrap_or_default()
}

fn encode_file_data(data: &[u8], file_size: u64, blocksizes: &[u64]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(data.len() + 16 + blocksizes.len() * 4);
    encode_key(UNIXFS_TYPE, WireType::Varint, &mut buf);
    encode_varint(UNIXFS_FILE, &mut buf);
    if !data.is_empty() {
        encode_bytes(UNIXFS_DATA, data, &mut buf);
    }
    encode_key(UNIXFS_FILESIZE, WireType::Varint, &mut buf);
    encode_varint(file_size, &mut buf);
    for size in blocksizes {
        encode_key(UNIXFS_BLOCKSIZES, WireType::Varint, &mut buf);
        encode_varint(*size, &mut buf);
    }
    buf
}

/// dag-pb writes links before data regardless of field number.
fn encode_node(links: &[Node], data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(data.len() + links.len() * 48 + 8);
    for link in links {
        let mut encoded = Vec::with_capacity(48);
        encode_bytes(PB_LINK_HASH, &link.multihash, &mut encoded);
        encode_bytes(PB_LINK_NAME, b"", &mut encoded);
        encode_key(PB_LINK_TSIZE, WireType::Varint, &mut encoded);
        encode_varint(link.tsize, &mut encoded);
        encode_bytes(PB_NODE_LINKS, &encoded, &mut buf);
    }
    encode_bytes(PB_NODE_DATA, data, &mut buf);
    buf
}

fn encode_bytes(tag: u32, value: &[u8], buf: &mut Vec<u8>) {
    encode_key(tag, WireType::LengthDelimited, buf);
    encode_varint(value.len() as u64, buf);
    buf.extend_from_slice(value);
}
