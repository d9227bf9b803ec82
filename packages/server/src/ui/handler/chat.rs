//! Chat room endpoint handlers.
//!
//! Every handler resolves the caller, hands the request to the
//! [`ChatService`](crate::usecase::ChatService) and maps the outcome through
//! [`respond`]. Authorization is the service's job; handlers never check
//! participation themselves.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::Response,
};

use crate::{
    domain::{
        ChatRoomId, ErrorCode, ItemId, PageRequest, SortDirection, SortField, UserId,
        pagination::DEFAULT_PAGE_SIZE,
    },
    infrastructure::dto::http::{
        ChatRoomListResponse, ChatRoomRequest, ChatRoomResponse, ListChatRoomsQuery,
    },
    ui::{identity::CallerIdentity, state::AppState},
    usecase::{ChatServiceError, CreateChatRoomInput},
};

use super::response::{ChatOperation, respond};

/// POST /api/chats
pub async fn create_chat_room(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    body: Result<Json<ChatRoomRequest>, JsonRejection>,
) -> Response {
    let outcome = create(&state, caller, body).await.map(Some);
    respond(ChatOperation::Create, outcome, state.expose_internal_errors)
}

/// GET /api/chats/{room_id}
pub async fn get_chat_room(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    room_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let outcome = get(&state, caller, room_id).await.map(Some);
    respond(ChatOperation::Get, outcome, state.expose_internal_errors)
}

/// GET /api/chats
pub async fn list_chat_rooms(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    query: Result<Query<ListChatRoomsQuery>, QueryRejection>,
) -> Response {
    let outcome = list(&state, caller, query).await.map(Some);
    respond(ChatOperation::List, outcome, state.expose_internal_errors)
}

/// DELETE /api/chats/{room_id}
pub async fn delete_chat_room(
    State(state): State<Arc<AppState>>,
    CallerIdentity(caller): CallerIdentity,
    room_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let outcome = delete(&state, caller, room_id)
        .await
        .map(|()| None::<()>);
    respond(ChatOperation::Delete, outcome, state.expose_internal_errors)
}

async fn create(
    state: &AppState,
    caller: UserId,
    body: Result<Json<ChatRoomRequest>, JsonRejection>,
) -> Result<ChatRoomResponse, ChatServiceError> {
    let Json(request) = body.map_err(|rejection| invalid_input(rejection.body_text()))?;
    let input = CreateChatRoomInput {
        counterparty_id: UserId::try_from(request.counterparty_user_id)
            .map_err(invalid_input)?,
        item_id: ItemId::new(request.item_id).map_err(invalid_input)?,
    };

    let room = state.chat_service.create_chat_room(caller, input).await?;
    Ok(ChatRoomResponse::from(room))
}

async fn get(
    state: &AppState,
    caller: UserId,
    room_id: Result<Path<i64>, PathRejection>,
) -> Result<ChatRoomResponse, ChatServiceError> {
    let room_id = parse_room_id(room_id)?;
    let room = state.chat_service.get_chat_room(room_id, caller).await?;
    Ok(ChatRoomResponse::from(room))
}

async fn list(
    state: &AppState,
    caller: UserId,
    query: Result<Query<ListChatRoomsQuery>, QueryRejection>,
) -> Result<ChatRoomListResponse, ChatServiceError> {
    let Query(query) = query.map_err(|rejection| invalid_page(rejection.body_text()))?;
    let request = page_request_from(query)?;
    let page = state.chat_service.list_chat_rooms(caller, request).await?;
    Ok(ChatRoomListResponse::from(page))
}

async fn delete(
    state: &AppState,
    caller: UserId,
    room_id: Result<Path<i64>, PathRejection>,
) -> Result<(), ChatServiceError> {
    let room_id = parse_room_id(room_id)?;
    state.chat_service.delete_chat_room(room_id, caller).await
}

fn parse_room_id(room_id: Result<Path<i64>, PathRejection>) -> Result<ChatRoomId, ChatServiceError> {
    let Path(room_id) = room_id.map_err(|rejection| invalid_input(rejection.body_text()))?;
    ChatRoomId::new(room_id).map_err(invalid_input)
}

/// Build a page request from the listing query.
///
/// An explicit `direction` wins over the direction given in `sort=field,dir`.
fn page_request_from(query: ListChatRoomsQuery) -> Result<PageRequest, ChatServiceError> {
    let (sort_field, sort_direction) = match query.sort.as_deref() {
        Some(sort) => match sort.split_once(',') {
            Some((field, direction)) => (Some(field), Some(direction)),
            None => (Some(sort), None),
        },
        None => (None, None),
    };

    let sort = sort_field
        .map(|field| field.parse::<SortField>())
        .transpose()
        .map_err(invalid_page)?
        .unwrap_or_default();
    let direction = query
        .direction
        .as_deref()
        .or(sort_direction)
        .map(|direction| direction.parse::<SortDirection>())
        .transpose()
        .map_err(invalid_page)?
        .unwrap_or_default();

    PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        sort,
        direction,
    )
    .map_err(invalid_page)
}

fn invalid_input(detail: impl ToString) -> ChatServiceError {
    ChatServiceError::business(ErrorCode::InvalidInput, detail.to_string())
}

fn invalid_page(detail: impl ToString) -> ChatServiceError {
    ChatServiceError::business(ErrorCode::InvalidPageRequest, detail.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::get as get_route,
    };
    use tower::ServiceExt;

    use crate::{
        domain::{BusinessError, ChatRoom, Page, Timestamp, ValueObjectError},
        ui::identity::CALLER_ID_HEADER,
        usecase::service::MockChatService,
    };

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - 4 つのハンドラーが ChatService の結果を正しくエンベロープに変換すること
    // - 呼び出し元の ID が ChatService にそのまま渡されること
    // - リクエスト形式のエラーが ChatService に到達しないこと
    //
    // 【なぜこのテストが必要か】
    // - 認可は ChatService 側の責務であり、ハンドラーに抜け道がないことを保証する
    // ========================================

    fn sample_room(id: i64, buyer: UserId, seller: i64) -> ChatRoom {
        ChatRoom {
            id: ChatRoomId::new(id).unwrap(),
            buyer_id: buyer,
            seller_id: UserId::new(seller).unwrap(),
            item_id: ItemId::new(7).unwrap(),
            created_at: Timestamp::new(1_672_498_800_000),
            updated_at: Timestamp::new(1_672_498_800_000),
        }
    }

    fn app(service: MockChatService) -> Router {
        let state = Arc::new(AppState::new(Arc::new(service), true));
        Router::new()
            .route("/api/chats", get_route(list_chat_rooms).post(create_chat_room))
            .route(
                "/api/chats/{room_id}",
                get_route(get_chat_room).delete(delete_chat_room),
            )
            .with_state(state)
    }

    fn request(method: Method, uri: &str, caller: Option<&str>, body: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(caller) = caller {
            builder = builder.header(CALLER_ID_HEADER, caller);
        }
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_chat_room_success() {
        // テスト項目: 作成成功時は 201 とチャットルームのデータを返す
        // given (前提条件):
        let mut service = MockChatService::new();
        service
            .expect_create_chat_room()
            .withf(|caller, input| {
                caller.value() == 1
                    && input.counterparty_id.value() == 42
                    && input.item_id.value() == 7
            })
            .times(1)
            .returning(|caller, input| Ok(sample_room(1, caller, input.counterparty_id.value())));

        // when (操作):
        let (status, body) = send(
            app(service),
            request(
                Method::POST,
                "/api/chats",
                Some("1"),
                Some(r#"{"counterpartyId": 42, "itemId": 7}"#),
            ),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Chat room created.");
        assert_eq!(body["data"]["chat_room_id"], 1);
        assert_eq!(body["data"]["buyer_id"], 1);
        assert_eq!(body["data"]["seller_id"], 42);
        assert_eq!(body["data"]["created_at"], "2022-12-31T15:00:00.000Z");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_create_chat_room_malformed_body_never_reaches_service() {
        // テスト項目: 不正なボディは 400 になり ChatService は呼ばれない
        // given (前提条件):
        let mut service = MockChatService::new();
        service.expect_create_chat_room().never();

        // when (操作):
        let (status, body) = send(
            app(service),
            request(Method::POST, "/api/chats", Some("1"), Some(r#"{"itemId": "seven"}"#)),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], ErrorCode::InvalidInput.message());
    }

    #[tokio::test]
    async fn test_create_chat_room_non_positive_counterparty_is_invalid_input() {
        // テスト項目: 相手のユーザー ID が正でない場合は 400 になり ChatService は呼ばれない
        // given (前提条件):
        let mut service = MockChatService::new();
        service.expect_create_chat_room().never();

        // when (操作):
        let (status, body) = send(
            app(service),
            request(
                Method::POST,
                "/api/chats",
                Some("1"),
                Some(r#"{"counterpartyId": 0, "itemId": 7}"#),
            ),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], ErrorCode::InvalidInput.message());
        assert_eq!(body["error"], ValueObjectError::UserIdNotPositive(0).to_string());
    }

    #[tokio::test]
    async fn test_get_chat_room_passes_caller_to_service() {
        // テスト項目: 取得時は呼び出し元の ID をそのまま ChatService に渡す
        // given (前提条件):
        let mut service = MockChatService::new();
        service
            .expect_get_chat_room()
            .withf(|room_id, caller| room_id.value() == 5 && caller.value() == 42)
            .times(1)
            .returning(|room_id, _| Ok(sample_room(room_id.value(), UserId::new(1).unwrap(), 42)));

        // when (操作):
        let (status, body) = send(
            app(service),
            request(Method::GET, "/api/chats/5", Some("42"), None),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["chat_room_id"], 5);
    }

    #[tokio::test]
    async fn test_get_chat_room_not_found() {
        // テスト項目: 存在しないチャットルームは 404 とカテゴリのメッセージになる
        // given (前提条件):
        let mut service = MockChatService::new();
        service.expect_get_chat_room().returning(|room_id, _| {
            Err(ChatServiceError::business(
                ErrorCode::ChatRoomNotFound,
                format!("chat room {room_id} does not exist"),
            ))
        });

        // when (操作):
        let (status, body) = send(
            app(service),
            request(Method::GET, "/api/chats/999", Some("1"), None),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Chat room not found.");
        assert_eq!(body["error"], "chat room 999 does not exist");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_get_chat_room_invalid_path_id() {
        // テスト項目: 数値でない・正でない ID は 400 になり ChatService は呼ばれない
        for uri in ["/api/chats/abc", "/api/chats/0"] {
            // given (前提条件):
            let mut service = MockChatService::new();
            service.expect_get_chat_room().never();

            // when (操作):
            let (status, body) = send(app(service), request(Method::GET, uri, Some("1"), None)).await;

            // then (期待する結果):
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
            assert_eq!(body["message"], ErrorCode::InvalidInput.message());
        }
    }

    #[tokio::test]
    async fn test_list_chat_rooms_defaults() {
        // テスト項目: クエリなしの一覧取得はデフォルトのページ指定で ChatService を呼ぶ
        // given (前提条件):
        let mut service = MockChatService::new();
        service
            .expect_list_chat_rooms()
            .withf(|caller, request| caller.value() == 1 && *request == PageRequest::default())
            .times(1)
            .returning(|caller, request| {
                Ok(Page::from_sorted(vec![sample_room(1, caller, 42)], &request))
            });

        // when (操作):
        let (status, body) = send(
            app(service),
            request(Method::GET, "/api/chats", Some("1"), None),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Chat rooms retrieved.");
        assert_eq!(body["data"]["size"], 10);
        assert_eq!(body["data"]["total_elements"], 1);
        assert_eq!(body["data"]["chat_rooms"][0]["chat_room_id"], 1);
    }

    #[tokio::test]
    async fn test_list_chat_rooms_sort_query() {
        // テスト項目: sort=field,direction 形式のクエリが PageRequest に反映される
        // given (前提条件):
        let expected = PageRequest::new(2, 5, SortField::UpdatedAt, SortDirection::Asc).unwrap();
        let mut service = MockChatService::new();
        service
            .expect_list_chat_rooms()
            .withf(move |_, request| *request == expected)
            .times(1)
            .returning(|_, request| Ok(Page::from_sorted(Vec::new(), &request)));

        // when (操作):
        let (status, _) = send(
            app(service),
            request(
                Method::GET,
                "/api/chats?page=2&size=5&sort=updatedAt,asc",
                Some("1"),
                None,
            ),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_chat_rooms_invalid_query() {
        // テスト項目: 不正なページ指定は 400 になり ChatService は呼ばれない
        for uri in [
            "/api/chats?size=0",
            "/api/chats?page=-1",
            "/api/chats?sort=price",
            "/api/chats?direction=sideways",
        ] {
            // given (前提条件):
            let mut service = MockChatService::new();
            service.expect_list_chat_rooms().never();

            // when (操作):
            let (status, body) = send(app(service), request(Method::GET, uri, Some("1"), None)).await;

            // then (期待する結果):
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
            assert_eq!(body["message"], ErrorCode::InvalidPageRequest.message());
        }
    }

    #[tokio::test]
    async fn test_delete_chat_room_success() {
        // テスト項目: 削除成功時は 200 でデータなしのエンベロープを返す
        // given (前提条件):
        let mut service = MockChatService::new();
        service
            .expect_delete_chat_room()
            .withf(|room_id, caller| room_id.value() == 5 && caller.value() == 1)
            .times(1)
            .returning(|_, _| Ok(()));

        // when (操作):
        let (status, body) = send(
            app(service),
            request(Method::DELETE, "/api/chats/5", Some("1"), None),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Chat room deleted.");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_delete_chat_room_by_non_participant() {
        // テスト項目: 参加者以外の削除は ChatService の判断どおり 403 になる
        // given (前提条件):
        let mut service = MockChatService::new();
        service.expect_delete_chat_room().returning(|room_id, caller| {
            Err(ChatServiceError::Business(BusinessError::new(
                ErrorCode::ChatRoomAccessDenied,
                format!("user {caller} is not a participant of chat room {room_id}"),
            )))
        });

        // when (操作):
        let (status, body) = send(
            app(service),
            request(Method::DELETE, "/api/chats/5", Some("99"), None),
        )
        .await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], ErrorCode::ChatRoomAccessDenied.message());
    }

    #[tokio::test]
    async fn test_unexpected_failure_for_every_operation() {
        // テスト項目: どの操作でも想定外エラーは 500 と success=false になる
        let cases = [
            (Method::POST, "/api/chats", Some(r#"{"counterparty_user_id": 42, "item_id": 7}"#)),
            (Method::GET, "/api/chats/5", None),
            (Method::GET, "/api/chats", None),
            (Method::DELETE, "/api/chats/5", None),
        ];
        for (method, uri, body) in cases {
            // given (前提条件):
            let failure = || ChatServiceError::Unexpected("storage unavailable".to_string());
            let mut service = MockChatService::new();
            service.expect_create_chat_room().returning(move |_, _| Err(failure()));
            service.expect_get_chat_room().returning(move |_, _| Err(failure()));
            service.expect_list_chat_rooms().returning(move |_, _| Err(failure()));
            service.expect_delete_chat_room().returning(move |_, _| Err(failure()));

            // when (操作):
            let (status, json) = send(app(service), request(method.clone(), uri, Some("1"), body)).await;

            // then (期待する結果):
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
            assert_eq!(json["success"], false);
            assert_eq!(json["error"], "storage unavailable");
        }
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        // テスト項目: 呼び出し元の ID がないリクエストは 401 になり ChatService は呼ばれない
        // given (前提条件):
        let mut service = MockChatService::new();
        service.expect_get_chat_room().never();

        // when (操作):
        let (status, body) = send(app(service), request(Method::GET, "/api/chats/5", None, None)).await;

        // then (期待する結果):
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], ErrorCode::Unauthenticated.message());
    }

    #[test]
    fn test_page_request_from_prefers_explicit_direction() {
        // テスト項目: direction パラメータは sort の方向指定より優先される
        // given (前提条件):
        let query = ListChatRoomsQuery {
            sort: Some("createdAt,asc".to_string()),
            direction: Some("desc".to_string()),
            ..Default::default()
        };

        // when (操作):
        let request = page_request_from(query).unwrap();

        // then (期待する結果):
        assert_eq!(request.sort(), SortField::CreatedAt);
        assert_eq!(request.direction(), SortDirection::Desc);
    }

    #[test]
    fn test_value_object_error_is_invalid_input() {
        // テスト項目: 値オブジェクトの検証エラーは INVALID_INPUT になる
        // when (操作):
        let error = invalid_input(ValueObjectError::ChatRoomIdNotPositive(0));

        // then (期待する結果):
        assert!(matches!(
            error,
            ChatServiceError::Business(BusinessError {
                code: ErrorCode::InvalidInput,
                ..
            })
        ));
    }
}
