//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 조립 과정(`core::registry`)의 진행 상황을 터미널에 표시합니다.
//! 로그 레벨과 무관하게 항상 출력되므로 시작 시점에만 사용합니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║             💬 Chat User Service                 ║
//! ╚══════════════════════════════════════════════════╝
//! → [1/3] 저장소 준비
//!    ├─ ChatUser: OK
//!    ├─ Attendance: 미설치
//! ✓ [1/3] 저장소 준비 (2 items)
//! ```

const BOX_WIDTH: usize = 50;

/// 박스 형태의 제목 출력
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, total: u8, description: &str) {
    println!("→ [{}/{}] {}", step, total, description);
}

/// 단계 완료 표시
///
/// `count`는 해당 단계에서 준비된 구성 요소 수입니다.
pub fn print_step_complete(step: u8, total: u8, description: &str, count: usize) {
    println!("✓ [{}/{}] {} ({} items)", step, total, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 조립 결과 요약
///
/// `features`는 `(이름, 상태)` 쌍이며 입력 순서대로 출력됩니다.
pub fn print_final_summary(repos: usize, services: usize, features: &[(&str, String)]) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY READY");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    for (name, status) in features {
        println!("   🔌 {}: {}", name, status);
    }
    println!();
}
