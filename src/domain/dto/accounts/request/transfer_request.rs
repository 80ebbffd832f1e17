use serde::{Deserialize, Serialize};

/// 이체 요청
///
/// 현재는 디코딩한 본문을 그대로 돌려주기만 하며 잔액은 변경하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_account: i64,
    pub amount: i64,
}
