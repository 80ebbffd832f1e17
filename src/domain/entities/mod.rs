//! # Domain Entities Module
//!
//! 영속 저장소에 저장되는 핵심 도메인 엔티티를 정의합니다.
//!
//! ## 엔티티 목록
//!
//! - [`accounts::Account`] - 은행 계좌 (번호, 소유자 이름, 암호화된 비밀번호, 잔액)
//!
//! 엔티티는 고유 식별자(`id`)를 가지며 저장소가 할당합니다.
//! 계좌 번호처럼 생성 이후 바뀌면 안 되는 값은 변경자(setter)를 제공하지 않습니다.

pub mod accounts;

pub use accounts::Account;
