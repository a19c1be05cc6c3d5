use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use secreview_core::{render_report, AnalysisResult};

use crate::state::AppState;

#[derive(Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub code: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "analysisResults")]
    pub analysis_results: AnalysisResult,
}

pub fn configure_code_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/analyze", web::post().to(analyze))
        .route("/generate-report", web::post().to(generate_report));
}

/// 分析一段代码，返回结构化扫描结果
pub async fn analyze(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    // 空代码在边界层拒绝，不进入引擎
    if req.code.trim().is_empty() || req.language.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Bad Request",
            "message": "Code and language are required"
        }));
    }

    let result = state.analyzer.analyze(&req.code, &req.language).await;
    tracing::debug!(
        language = %req.language,
        issues = result.summary.total_issues,
        "analysis completed"
    );
    HttpResponse::Ok().json(result)
}

/// 将之前产出的分析结果渲染为可下载的报告
pub async fn generate_report(req: web::Json<ReportRequest>) -> impl Responder {
    match render_report(&req.analysis_results) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/octet-stream")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"security-report.txt\"",
            ))
            .body(bytes),
        Err(e) => {
            tracing::error!("Failed to render report: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Report generation failed: {}", e)
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    macro_rules! test_service {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new()))
                    .service(crate::api::create_api_router()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn analyze_rejects_empty_code() {
        let app = test_service!();
        let req = test::TestRequest::post()
            .uri("/api/code-review/analyze")
            .set_json(serde_json::json!({"code": "", "language": "javascript"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn analyze_rejects_missing_language() {
        let app = test_service!();
        let req = test::TestRequest::post()
            .uri("/api/code-review/analyze")
            .set_json(serde_json::json!({"code": "const x = 1;"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn analyze_returns_structured_result() {
        let app = test_service!();
        let req = test::TestRequest::post()
            .uri("/api/code-review/analyze")
            .set_json(serde_json::json!({
                "code": "const query = \"SELECT * FROM users WHERE id = \" + userId;",
                "language": "javascript"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["summary"]["totalIssues"], 1);
        assert_eq!(body["summary"]["criticalIssues"], 1);
        assert_eq!(body["vulnerabilities"][0]["id"], "sql-injection");
        assert_eq!(body["vulnerabilities"][0]["cweId"], "CWE-89");
        assert_eq!(body["vulnerabilities"][0]["locations"][0]["line"], 1);
    }

    #[actix_web::test]
    async fn report_endpoint_round_trips_analysis_result() {
        let app = test_service!();
        let req = test::TestRequest::post()
            .uri("/api/code-review/analyze")
            .set_json(serde_json::json!({
                "code": "element.innerHTML = userContent;",
                "language": "javascript"
            }))
            .to_request();
        let result: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/code-review/generate-report")
            .set_json(serde_json::json!({ "analysisResults": result }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.contains("security-report"));

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Security Code Review Report"));
        assert!(text.contains("Total Issues: 1"));
    }

    #[actix_web::test]
    async fn report_endpoint_rejects_missing_body() {
        let app = test_service!();
        let req = test::TestRequest::post()
            .uri("/api/code-review/generate-report")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
