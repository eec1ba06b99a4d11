//! Mapping between `ferrous_dig_domain::RecordKind` and `hickory_proto::rr::RecordType`

use ferrous_dig_domain::RecordKind;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(kind: RecordKind) -> HickoryRecordType {
        match kind {
            RecordKind::A => HickoryRecordType::A,
            RecordKind::AAAA => HickoryRecordType::AAAA,
            RecordKind::CNAME => HickoryRecordType::CNAME,
            RecordKind::MX => HickoryRecordType::MX,
            RecordKind::TXT => HickoryRecordType::TXT,
            RecordKind::CAA => HickoryRecordType::CAA,
            RecordKind::NS => HickoryRecordType::NS,
        }
    }
}
